mod client_ip;
mod error;
