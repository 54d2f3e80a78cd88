use anyhow::Context;
use clap::Parser;
use crossbeam_channel::unbounded;
use log::{error, info, warn, LevelFilter};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::thread;

use flashlight::config::Setting;
use flashlight::msg::HostEvent;
use flashlight::state::LightState;
use flashlight::vision::LightFrame;

/// 手電筒光照：從 stdin 讀取指標事件，每個事件輸出一幀
#[derive(Parser, Debug)]
#[command(name = "flashlight", version)]
struct Args {
    /// 設定檔
    #[arg(long, default_value = "flashlight.toml")]
    config: PathBuf,
    /// 場景檔（覆蓋設定檔中的 scene.path）
    #[arg(long)]
    scene: Option<PathBuf>,
    /// 射線數量（覆蓋設定檔中的 light.samples）
    #[arg(long)]
    samples: Option<u32>,
    /// log4rs 設定檔
    #[arg(long, default_value = "log4rs.yml")]
    log_config: PathBuf,
    /// 輸出 SVG 路徑而不是 JSON
    #[arg(long)]
    svg: bool,
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        return log4rs::init_file(path, Default::default());
    }

    use log4rs::append::console::{ConsoleAppender, Target};
    use log4rs::config::{Appender, Config, Root};
    use log4rs::encode::pattern::PatternEncoder;

    // stdout 保留給輸出的幀，日誌一律寫 stderr
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S%.3f)} {h({l})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))
        .map_err(|e| anyhow::anyhow!("invalid logging config: {}", e))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn load_setting(args: &Args) -> anyhow::Result<Setting> {
    let mut setting = if args.config.exists() {
        Setting::load(&args.config)?
    } else {
        warn!("config {} not found, using defaults", args.config.display());
        Setting::default()
    };

    if let Some(scene) = &args.scene {
        setting.scene.path = Some(scene.clone());
    }
    if let Some(samples) = args.samples {
        setting.light.samples = samples;
    }
    setting.validate()?;
    Ok(setting)
}

fn emit(out: &mut impl Write, frame: &LightFrame, svg: bool) -> anyhow::Result<()> {
    if svg {
        writeln!(out, "{}", frame.svg_path())?;
    } else {
        writeln!(out, "{}", frame.to_json()?)?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.log_config).context("cannot initialize logging")?;

    let setting = load_setting(&args).context("cannot load config")?;
    let mut state = LightState::new(setting).context("cannot load scene")?;

    let (tx, rx) = unbounded::<String>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                },
                Err(e) => {
                    error!("stdin read failed: {}", e);
                    break;
                },
            }
        }
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // 啟動時先畫一幀
    emit(&mut out, &state.frame(), args.svg)?;

    for line in rx.iter() {
        if line.trim().is_empty() {
            continue;
        }
        let event = match HostEvent::parse_line(&line) {
            Ok(event) => event,
            Err(e) => {
                warn!("ignored input `{}`: {}", line.trim(), e);
                continue;
            },
        };
        match state.handle(event) {
            Some(frame) => emit(&mut out, &frame, args.svg)?,
            None => break,
        }
    }

    info!("bye");
    Ok(())
}
