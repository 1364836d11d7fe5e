pub mod mobile_menu;
