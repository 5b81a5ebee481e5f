pub mod chess_client;
pub mod duolingo_client;
pub mod handlers;
pub mod leetcode_client;
pub mod models;
pub mod parsers;
pub mod routes;

pub use chess_client::ChessClient;
pub use duolingo_client::DuolingoClient;
pub use leetcode_client::LeetCodeClient;
