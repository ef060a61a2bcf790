pub mod songs_sea;
