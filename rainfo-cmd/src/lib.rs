//! Command implementations for the Rainfo CLI.
//!
//! Every subcommand works against the embedded state atlas; nothing touches
//! the network or the filesystem.

use clap::Subcommand;
use rainfo_core::{StateAtlas, TipCategory};

pub mod listing;
pub mod lookup;

#[derive(Subcommand)]
pub enum Command {
    /// Print the two-letter code for a state name or code
    Code {
        /// State name or code, any case
        location: String,
    },

    /// Print the state name for a state code or name
    Name {
        /// State name or code, any case
        location: String,
    },

    /// Print the yearly rainfall for a state
    Rainfall {
        /// State name or code, any case
        location: String,
    },

    /// Print the U.S. Drought Monitor map address for a state
    MapUrl {
        /// State name or code, any case
        location: String,
    },

    /// List every state with its code and yearly rainfall
    States {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print water conservation tips
    Tips {
        /// Only print one category (showers, faucets, outdoors, extra)
        #[arg(short, long)]
        category: Option<TipCategory>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    let atlas = StateAtlas::embedded();
    let output = match command {
        Command::Code { location } => lookup::code_line(atlas, &location),
        Command::Name { location } => lookup::name_line(atlas, &location),
        Command::Rainfall { location } => lookup::rainfall_line(atlas, &location)?,
        Command::MapUrl { location } => lookup::map_url_line(atlas, &location)?,
        Command::States { json } => listing::render_states(atlas, json)?,
        Command::Tips { category } => listing::render_tips(category),
    };
    println!("{}", output);
    Ok(())
}
