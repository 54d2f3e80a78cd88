use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// 宿主端送進來的事件
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum HostEvent {
    /// 指標移動
    PointerMoved { x: f64, y: f64 },
    /// 視窗縮放
    Resized { width: f64, height: f64 },
    /// 以目前位置重畫
    Redraw,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum EventError {
    #[error("empty event line")]
    Empty,
    #[error("unknown event `{0}`")]
    UnknownCommand(String),
    #[error("`{command}` expects {expected} arguments, got {got}")]
    Arity { command: &'static str, expected: usize, got: usize },
    #[error("`{0}` is not a finite number")]
    BadNumber(String),
    #[error("size {width}x{height} must be positive")]
    BadSize { width: f64, height: f64 },
    #[error("bad JSON event: {0}")]
    Json(String),
}

impl HostEvent {
    /// 解析一行輸入：JSON 物件或純文字指令
    pub fn parse_line(line: &str) -> Result<HostEvent, EventError> {
        let line = line.trim();
        if line.starts_with('{') {
            let event: HostEvent = serde_json::from_str(line).map_err(|e| EventError::Json(e.to_string()))?;
            event.validate()?;
            Ok(event)
        } else {
            line.parse()
        }
    }

    fn validate(&self) -> Result<(), EventError> {
        match *self {
            HostEvent::PointerMoved { x, y } if !(x.is_finite() && y.is_finite()) => {
                Err(EventError::BadNumber(format!("({}, {})", x, y)))
            },
            HostEvent::Resized { width, height } if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) => {
                Err(EventError::BadSize { width, height })
            },
            _ => Ok(()),
        }
    }
}

impl FromStr for HostEvent {
    type Err = EventError;

    /// 一行一個事件：`move x y`、`resize w h`、`redraw`、`quit`
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let command = parts.next().ok_or(EventError::Empty)?.to_ascii_lowercase();
        let args: Vec<&str> = parts.collect();

        match command.as_str() {
            "move" => {
                let [x, y] = numbers("move", &args)?;
                Ok(HostEvent::PointerMoved { x, y })
            },
            "resize" => {
                let [width, height] = numbers("resize", &args)?;
                if width <= 0.0 || height <= 0.0 {
                    return Err(EventError::BadSize { width, height });
                }
                Ok(HostEvent::Resized { width, height })
            },
            "redraw" => {
                expect_arity("redraw", &args, 0)?;
                Ok(HostEvent::Redraw)
            },
            "quit" | "exit" => {
                expect_arity("quit", &args, 0)?;
                Ok(HostEvent::Quit)
            },
            _ => Err(EventError::UnknownCommand(command)),
        }
    }
}

fn expect_arity(command: &'static str, args: &[&str], expected: usize) -> Result<(), EventError> {
    if args.len() != expected {
        return Err(EventError::Arity { command, expected, got: args.len() });
    }
    Ok(())
}

fn numbers(command: &'static str, args: &[&str]) -> Result<[f64; 2], EventError> {
    expect_arity(command, args, 2)?;
    let parse = |s: &str| {
        s.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| EventError::BadNumber(s.to_string()))
    };
    Ok([parse(args[0])?, parse(args[1])?])
}
