use std::io::BufReader;

use anyhow::Context;
use jtrack::frame::read_frames;
use jtrack::stats::{Level, Regularity, Stats, Tempo};
use jtrack::{JuggleTracker, LogNotifier, Session, TrackerConfig};
use tracing_subscriber::EnvFilter;

fn print_report(stats: &Stats) {
    println!("=============================================");
    println!("juggles:        {}", stats.juggles);
    println!("touches:        {}", stats.touches);
    println!("session:        {:.1}s", stats.session_duration);
    println!("rate:           {:.1} juggles/min", stats.juggles_per_minute);

    if stats.mean_interval > 0.0 {
        println!("mean interval:  {:.2}s", stats.mean_interval);
    }

    let milestones = stats.milestones_reached();
    if !milestones.is_empty() {
        println!("milestones:     {:?}", milestones);
    }

    if let Some(summary) = stats.intervals {
        println!("shortest:       {:.2}s", summary.min);
        println!("longest:        {:.2}s", summary.max);
        println!("std dev:        {:.2}s", summary.std_dev);

        let regularity = match summary.regularity {
            Regularity::Excellent => "excellent, very steady rhythm",
            Regularity::Good => "good, fairly regular",
            Regularity::Variable => "variable, keep practising",
        };
        println!("regularity:     {}", regularity);
    }

    match stats.level() {
        Level::Master => println!("level:          master"),
        Level::Excellent => println!("level:          excellent"),
        Level::VeryGood => println!("level:          very good"),
        Level::Decent => println!("level:          not bad"),
        Level::Beginner => println!(
            "level:          keep going, {} more for the first milestone",
            stats.juggles_to_first_milestone()
        ),
    }

    match stats.tempo() {
        Some(Tempo::Fast) => println!("advice:         fast rhythm, slow down for control"),
        Some(Tempo::Slow) => println!("advice:         you can speed up a little"),
        Some(Tempo::Steady) => println!("advice:         good rhythm"),
        None => {}
    }

    println!(
        "next milestone: {} ({}/{})",
        stats.next_milestone(),
        stats.milestone_progress(),
        stats.milestone_interval
    );
    println!("=============================================");
}

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = std::env::args().skip(1);
    let frames_path = args
        .next()
        .context("usage: replay <frames file> [config.toml]")?;

    let config = match args.next() {
        Some(path) => TrackerConfig::load(&path).with_context(|| format!("loading {}", path))?,
        None => TrackerConfig::default(),
    };

    let file = std::fs::File::open(&frames_path)
        .with_context(|| format!("opening {}", frames_path))?;

    let tracker = JuggleTracker::with_config(config, 0.0)?;
    let mut session = Session::new(tracker, LogNotifier);
    let stats = session.run(read_frames(BufReader::new(file)))?;

    print_report(&stats);

    Ok(())
}
