pub mod role_rto;
