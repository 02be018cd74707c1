mod admin;
mod helpers;
mod me;
mod public;

pub(crate) use admin::set_role;
pub(crate) use me::{delete_me, update_me};
pub(crate) use public::{get_user, list_users, register};
