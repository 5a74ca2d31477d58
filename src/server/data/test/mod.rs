mod booking;
mod comment;
mod item;
mod user;
