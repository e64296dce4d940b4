mod apartment;
mod apartment_user;
mod car;
mod company;
mod favorite;
