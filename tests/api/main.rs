mod helpers;

mod activation;
mod logout;
