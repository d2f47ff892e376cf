use std::thread;

use anyhow::{Context, Result};
use clap::Parser;

use guixe_engine::logging::{LoggingConfig, init_logging};
use guixe_engine::scene::{DrawCmd, DrawList};
use guixe_engine::time::{MinuteClock, MinuteTick};
use guixe_engine::{ClockConfig, ClockFrame, WordList};

/// Guixe word clock, rendered headless once per minute
#[derive(Debug, Parser)]
#[command(name = "guixe-studio")]
#[command(about = "Renders the Guixe word clock once per minute")]
struct StudioArgs {
    /// Render a single frame and exit
    #[arg(long)]
    once: bool,

    /// Twelve words replacing the defaults, hour 1 first
    words: Vec<String>,
}

impl StudioArgs {
    /// Word list given on the command line, if any.
    fn word_list(&self) -> Result<Option<WordList>> {
        if self.words.is_empty() {
            return Ok(None);
        }
        let words = self.words.iter().map(|w| w.trim().to_uppercase());
        let list = WordList::new(words).context("loading words from the command line")?;
        Ok(Some(list))
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let args = StudioArgs::parse();

    let mut config = ClockConfig::default();
    if let Some(words) = args.word_list()? {
        config = config.with_words(words);
    }
    log::info!("words: {:?}", config.words());

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║            GUIXE WORD CLOCK            ║");
    println!("  ║   one sentence per minute, on the dot  ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let mut clock = MinuteClock::system();
    let mut list = DrawList::new();

    loop {
        let tick = clock.tick();
        let frame = ClockFrame::compose(&config, tick.time);

        list.clear();
        frame.record(&config, &mut list);
        report(&tick, &frame, &mut list);

        if args.once {
            return Ok(());
        }

        let wait = clock
            .until_next_boundary()
            .context("scheduling the next minute tick")?;
        log::debug!("sleeping {:.3}s until the next minute", wait.as_secs_f64());
        thread::sleep(wait);
    }
}

fn report(tick: &MinuteTick, frame: &ClockFrame, list: &mut DrawList) {
    println!("  {}  {}", tick.now.format("%H:%M"), frame.sentence);

    log::debug!(
        "tick {}: hour angle {}°, minute hand tip {:?}",
        tick.tick_index,
        frame.is_rotation,
        frame.minute_hand.inner
    );

    for item in list.iter_in_paint_order() {
        match &item.cmd {
            DrawCmd::Circle(c) => log::trace!("  circle r={} at {:?}", c.radius, c.center),
            DrawCmd::Polygon(p) => log::trace!("  polygon {:?}", p.points),
            DrawCmd::Text(t) => log::trace!("  text {:?} {:?} rot={}", t.role, t.text, t.rotation),
        }
    }
}
