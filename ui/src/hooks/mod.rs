pub mod use_flash_message;
