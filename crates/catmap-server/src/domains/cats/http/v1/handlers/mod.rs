mod admin;
mod helpers;
mod reads;
mod writes;

pub(crate) use admin::{admin_delete_cat, admin_update_cat};
pub(crate) use reads::{cats_in_area, get_cat, list_cats, my_cats};
pub(crate) use writes::{create_cat, delete_cat, update_cat};
