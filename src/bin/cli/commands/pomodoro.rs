use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::Result;

use lumi_lib::pomodoro::{PomodoroTimer, TimerMode};

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum ModeArg {
    Focus,
    Short,
    Long,
}

impl From<ModeArg> for TimerMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Focus => TimerMode::Focus,
            ModeArg::Short => TimerMode::ShortBreak,
            ModeArg::Long => TimerMode::LongBreak,
        }
    }
}

/// Count a timer down in the terminal, one tick per second.
pub fn run(mode: ModeArg) -> Result<()> {
    let mode = TimerMode::from(mode);
    let mut timer = PomodoroTimer::new(mode);
    timer.toggle();

    println!("{} session: {}", mode.label(), timer.format_remaining());
    while timer.is_running() {
        thread::sleep(Duration::from_secs(1));
        let finished = timer.tick();
        print!("\r{}  ", timer.format_remaining());
        std::io::stdout().flush()?;
        if finished {
            println!("\n{} session complete!", mode.label());
        }
    }
    Ok(())
}
