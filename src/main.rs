use chrono::Local;
use clap::Parser;
use janggi::board::Board;
use janggi::camp::Camp;
use janggi::display::BoardDisplay;
use janggi::formation::Formation;
use log::{info, LevelFilter};
use rand::Rng;
use std::error::Error;
use std::io::Write;

#[derive(Parser, Debug)]
struct Arguments {
    /// Board notation to load instead of assembling a random opening.
    #[clap(short, long)]
    notation: Option<String>,

    /// Disable colored output.
    #[clap(short, long)]
    plain: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let arguments = Arguments::parse();

    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Info)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{:5}] {}",
                Local::now().format("%T%.3f"),
                record.level(),
                record.args(),
            )
        })
        .init();

    let mut random = rand::rng();
    let bottom_camp = if random.random_range(0..2) == 0 {
        Camp::Cho
    } else {
        Camp::Han
    };
    let cho_formation = Formation::ALL[random.random_range(0..Formation::ALL.len())];
    let han_formation = Formation::ALL[random.random_range(0..Formation::ALL.len())];

    info!("assembling {cho_formation:?} against {han_formation:?} with {bottom_camp:?} at the bottom");

    let board = match &arguments.notation {
        Some(notation) => Board::from_notation(cho_formation, han_formation, notation, bottom_camp)?,
        None => Board::from_formations(cho_formation, han_formation, bottom_camp),
    };

    println!(
        "CHO: {} / HAN: {}",
        board.score(Camp::Cho),
        board.score(Camp::Han)
    );

    if arguments.plain {
        println!("{}", BoardDisplay::plain(&board));
    } else {
        println!("{}", BoardDisplay::new(&board));
    }

    Ok(())
}
