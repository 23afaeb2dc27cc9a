mod adoptions;
mod contact;
mod fosters;
mod helpers;
