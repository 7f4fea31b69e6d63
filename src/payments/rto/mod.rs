pub mod gateway_rto;
