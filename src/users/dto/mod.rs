pub mod sync_user_role_dto;
