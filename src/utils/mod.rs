pub mod auto_logout;
pub mod contact;
pub mod debounce;
pub mod modal_close;
pub mod zip_lookup;
