mod header_allow_list;
mod helpers;
mod postgres_user_directory;
mod redis_pin_code_store;
mod reset_password;
