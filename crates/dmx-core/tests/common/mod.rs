pub mod icon_service;
