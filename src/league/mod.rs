pub mod bracket;
pub mod cache;
pub mod rank;
pub mod table;

pub use bracket::{default_brackets, Bracket};
pub use cache::LeagueTableCache;
pub use rank::{percent_of_best, rank, BracketRank, RankRecord};
pub use table::{
    build_league_table, build_league_tables, LeagueEntry, LeagueTable, LeagueTables, TopBuild,
};
