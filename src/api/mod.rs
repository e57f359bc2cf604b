pub mod client;
pub mod parsers;

pub use client::TournamentApiClient;
