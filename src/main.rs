// SPDX-License-Identifier: MPL-2.0
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use webcam_lens::app::{runtime, Message, Viewer};
use webcam_lens::application::port::Renderer;
use webcam_lens::application::query::{ScrubPosition, SelectionSnapshot};
use webcam_lens::application::Confirmation;
use webcam_lens::catalog::Hierarchy;
use webcam_lens::config::{self, Config};
use webcam_lens::error::Error;
use webcam_lens::infrastructure::{HttpBackend, TokioTimers};
use webcam_lens::playback::PlaybackInterval;

const HELP: &str = "\
webcam_lens - browse webcam captures

USAGE:
  webcam_lens [OPTIONS]

OPTIONS:
  --server URL       Capture server base URL
  --interval MS      Auto-advance interval in milliseconds
  --masks            Include mask images
  --no-auto          Start with auto-advance off
  --group KEY        Open this group after loading
  --user NAME        Basic auth user
  --password PASS    Basic auth password
  --save             Store these options in settings.toml
  -h, --help         Print this help

COMMANDS (one per line on stdin):
  l            reload the day/group list
  g KEY        open group KEY
  n / p        next / previous image
  0            back to the first image
  s FRACTION   jump to a position (0.0 - 1.0)
  a on|off     auto-advance
  i MS         auto-advance interval
  m on|off     show mask images (next group)
  r            rescan the server
  d            delete the open group
  q            quit (or Ctrl-C; the session keeps running after end of input)
";

struct Args {
    server: Option<String>,
    interval: Option<u64>,
    masks: bool,
    no_auto: bool,
    group: Option<String>,
    user: Option<String>,
    password: Option<String>,
    save: bool,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    let parsed = Args {
        server: args.opt_value_from_str("--server")?,
        interval: args.opt_value_from_str("--interval")?,
        masks: args.contains("--masks"),
        no_auto: args.contains("--no-auto"),
        group: args.opt_value_from_str("--group")?,
        user: args.opt_value_from_str("--user")?,
        password: args.opt_value_from_str("--password")?,
        save: args.contains("--save"),
    };
    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("Ignoring unexpected arguments: {:?}", rest);
    }
    Ok(Some(parsed))
}

fn apply_args(config: &mut Config, args: &Args) {
    if args.server.is_some() {
        config.server_url = args.server.clone();
    }
    if args.interval.is_some() {
        config.interval_ms = args.interval;
    }
    if args.masks {
        config.show_mask_images = Some(true);
    }
    if args.no_auto {
        config.auto_advance = Some(false);
    }
    if args.user.is_some() {
        config.username = args.user.clone();
    }
    if args.password.is_some() {
        config.password = args.password.clone();
    }
}

/// Writes what a graphical front end would paint to the log.
struct LogRenderer {
    backend: HttpBackend,
}

impl Renderer for LogRenderer {
    fn render_hierarchy(&mut self, hierarchy: &Hierarchy) {
        for day in hierarchy.days() {
            log::info!("{}", day.id());
            for group in day.groups() {
                log::info!("    {}  [{}]", group.id(), group.key());
            }
        }
    }

    fn render_selection(&mut self, snapshot: &SelectionSnapshot) {
        if snapshot.no_further_images {
            log::info!("{}  no further images", snapshot.description());
            return;
        }
        match &snapshot.filename {
            Some(filename) => {
                let url = self
                    .backend
                    .image_url(filename)
                    .map(|url| url.to_string())
                    .unwrap_or_default();
                log::info!(
                    "{} {:>3}%  {}  {}",
                    snapshot.description(),
                    snapshot.progress_percent(),
                    filename,
                    url
                );
            }
            None => log::info!("{}  no images", snapshot.description()),
        }
    }

    fn render_error(&mut self, error: &Error) {
        log::error!("{}", error);
    }
}

/// A parsed stdin command.
#[derive(Debug, PartialEq)]
enum Command {
    Send(Message),
    Delete,
    Quit,
}

fn parse_switch(value: &str) -> Option<bool> {
    match value {
        "on" | "1" | "true" => Some(true),
        "off" | "0" | "false" => Some(false),
        _ => None,
    }
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let name = parts.next()?;
    let arg = parts.next();
    let message = match (name, arg) {
        ("q", _) => return Some(Command::Quit),
        ("d", _) => return Some(Command::Delete),
        ("l", _) => Message::LoadHierarchy,
        ("r", _) => Message::Refresh,
        ("n", _) => Message::Step(1),
        ("p", _) => Message::Step(-1),
        ("0", _) => Message::RestartGroup,
        ("g", Some(key)) => Message::SelectGroup(key.to_string()),
        ("s", Some(value)) => Message::Scrub(ScrubPosition::new(value.parse().ok()?)?),
        ("a", Some(value)) => Message::SetAutoAdvance(parse_switch(value)?),
        ("m", Some(value)) => Message::SetMaskVisibility(parse_switch(value)?),
        ("i", Some(value)) => Message::SetInterval(PlaybackInterval::parse(value)?),
        _ => return None,
    };
    Some(Command::Send(message))
}

/// Why [`read_commands`] returned.
#[derive(Debug, PartialEq)]
enum InputEnd {
    /// The user asked to quit.
    Quit,
    /// End of input, or the session is gone.
    Closed,
}

async fn read_commands<I, O>(
    input: I,
    mut prompt: O,
    sender: &mpsc::UnboundedSender<Message>,
) -> InputEnd
where
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let message = match parse_command(&line) {
            Some(Command::Send(message)) => message,
            Some(Command::Delete) => {
                let _ = prompt.write_all(b"Are you sure? [y/N] ").await;
                let _ = prompt.flush().await;
                let answer = lines.next_line().await.ok().flatten().unwrap_or_default();
                let confirmed = matches!(answer.trim(), "y" | "Y" | "yes");
                Message::DeleteCurrentGroup(Confirmation::from(confirmed))
            }
            Some(Command::Quit) => return InputEnd::Quit,
            None => {
                if !line.trim().is_empty() {
                    log::warn!("Unknown command: {}", line.trim());
                }
                continue;
            }
        };
        if sender.send(message).is_err() {
            break;
        }
    }
    InputEnd::Closed
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{}", HELP);
            return;
        }
        Err(err) => {
            eprintln!("{}\n\n{}", err, HELP);
            std::process::exit(2);
        }
    };

    let mut config = config::load().unwrap_or_else(|err| {
        log::warn!("{}", err);
        Config::default()
    });
    apply_args(&mut config, &args);
    if args.save {
        match config::save(&config) {
            Ok(()) => log::info!("Settings saved"),
            Err(err) => log::warn!("Could not save settings: {}", err),
        }
    }

    let backend = match HttpBackend::from_config(&config) {
        Ok(backend) => backend,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(2);
        }
    };
    log::info!("Capture server: {}", backend.base_url());

    let (timers, ticks) = TokioTimers::new();
    let renderer = LogRenderer {
        backend: backend.clone(),
    };
    let mut viewer = Viewer::new(
        backend,
        renderer,
        timers,
        config.playback(),
        config.show_mask_images(),
    );

    let (sender, messages) = mpsc::unbounded_channel();
    let _ = sender.send(Message::LoadHierarchy);
    if let Some(group) = args.group {
        let _ = sender.send(Message::SelectGroup(group));
    }
    tokio::spawn(async move {
        let input = BufReader::new(tokio::io::stdin());
        if read_commands(input, tokio::io::stdout(), &sender).await == InputEnd::Closed {
            log::info!("End of input, press Ctrl-C to quit");
            // Holding the sender keeps the session running.
            std::future::pending::<()>().await;
        }
    });

    tokio::select! {
        () = runtime::run(&mut viewer, messages, ticks) => {}
        _ = tokio::signal::ctrl_c() => log::info!("Interrupted"),
    }
    viewer.shutdown();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_navigation_commands() {
        assert_eq!(parse_command("n"), Some(Command::Send(Message::Step(1))));
        assert_eq!(parse_command(" p "), Some(Command::Send(Message::Step(-1))));
        assert_eq!(
            parse_command("g CAM1_01-20200830171549-00.jpg"),
            Some(Command::Send(Message::SelectGroup(
                "CAM1_01-20200830171549-00.jpg".into()
            )))
        );
    }

    #[test]
    fn parses_playback_commands() {
        assert_eq!(
            parse_command("i 250"),
            Some(Command::Send(Message::SetInterval(PlaybackInterval::new(250))))
        );
        assert_eq!(
            parse_command("a off"),
            Some(Command::Send(Message::SetAutoAdvance(false)))
        );
        assert_eq!(
            parse_command("s 0.5"),
            ScrubPosition::new(0.5).map(|p| Command::Send(Message::Scrub(p)))
        );
    }

    #[test]
    fn rejects_invalid_arguments() {
        assert_eq!(parse_command("i -5"), None);
        assert_eq!(parse_command("a maybe"), None);
        assert_eq!(parse_command("s nan"), None);
        assert_eq!(parse_command("g"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn delete_and_quit_are_local_commands() {
        assert_eq!(parse_command("d"), Some(Command::Delete));
        assert_eq!(parse_command("q"), Some(Command::Quit));
    }

    #[test]
    fn args_override_config() {
        let mut config = Config::default();
        let args = Args {
            server: Some("http://cam:8090/".into()),
            interval: Some(40),
            masks: true,
            no_auto: true,
            group: None,
            user: None,
            password: None,
            save: false,
        };
        apply_args(&mut config, &args);
        assert_eq!(config.server_url(), "http://cam:8090/");
        assert_eq!(config.playback().interval.as_millis(), 40);
        assert!(!config.playback().enabled);
        assert!(config.show_mask_images());
    }

    #[tokio::test]
    async fn commands_are_forwarded_until_end_of_input() {
        let (sender, mut messages) = mpsc::unbounded_channel();
        let mut prompt = Vec::new();

        let end = read_commands(&b"n\nbogus\nd\ny\n"[..], &mut prompt, &sender).await;

        assert_eq!(end, InputEnd::Closed);
        assert_eq!(messages.recv().await, Some(Message::Step(1)));
        assert_eq!(
            messages.recv().await,
            Some(Message::DeleteCurrentGroup(Confirmation::Confirmed))
        );
        assert!(messages.try_recv().is_err());
        assert_eq!(prompt, b"Are you sure? [y/N] ");
    }

    #[tokio::test]
    async fn unanswered_delete_prompt_declines() {
        let (sender, mut messages) = mpsc::unbounded_channel();

        read_commands(&b"d\n"[..], Vec::new(), &sender).await;

        assert_eq!(
            messages.recv().await,
            Some(Message::DeleteCurrentGroup(Confirmation::Declined))
        );
    }

    #[tokio::test]
    async fn quit_stops_reading() {
        let (sender, mut messages) = mpsc::unbounded_channel();

        let end = read_commands(&b"q\nn\n"[..], Vec::new(), &sender).await;

        assert_eq!(end, InputEnd::Quit);
        assert!(messages.try_recv().is_err());
    }
}
