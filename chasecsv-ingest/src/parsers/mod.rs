pub mod chase_uk;
