pub mod user_rto;
