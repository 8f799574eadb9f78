//! Runtime loop tests with a scripted driver.

use std::{collections::VecDeque, convert::Infallible};

use tuitter_app::{App, AppAction, AppConfig, AppEvent, Driver, KeyInput, Runtime, Screen};
use tuitter_core::{FakeApi, FixedClock, SocialApi, Timestamp};

/// Replays a fixed key sequence and records what each frame showed.
#[derive(Default)]
struct ScriptedDriver {
    keys: VecDeque<KeyInput>,
    frames: Vec<(Screen, Option<String>)>,
    stopped: bool,
}

impl ScriptedDriver {
    fn new(keys: impl IntoIterator<Item = KeyInput>) -> Self {
        Self { keys: keys.into_iter().collect(), ..Self::default() }
    }
}

impl Driver for ScriptedDriver {
    type Error = Infallible;

    async fn poll_event(&mut self, app: &mut App) -> Result<Vec<AppAction>, Self::Error> {
        // Quit once the script runs out so the loop always terminates.
        let key = self.keys.pop_front().unwrap_or(KeyInput::Char('q'));
        Ok(app.handle(AppEvent::Key(key)))
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.frames.push((app.screen(), app.status_message().map(str::to_string)));
        Ok(())
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}

fn api() -> FakeApi<FixedClock> {
    FakeApi::with_clock(FixedClock(Timestamp::from_unix_secs(1_700_000_000)))
}

#[tokio::test]
async fn test_runtime_quits_on_q() {
    let mut runtime = Runtime::new(ScriptedDriver::new([]), api(), AppConfig::default());
    runtime.run().await.expect("infallible driver");

    assert_eq!(runtime.app().timeline().items().len(), 3);
    assert_eq!(runtime.app().me().map(|u| u.handle.as_str()), Some("yourname"));
}

#[tokio::test]
async fn test_runtime_routes_data_actions() {
    let keys = [KeyInput::Char('2'), KeyInput::Char('l'), KeyInput::Char('4'), KeyInput::Enter];
    let mut runtime = Runtime::new(ScriptedDriver::new(keys), api(), AppConfig::default());
    runtime.run().await.expect("infallible driver");

    let app = runtime.app();
    assert_eq!(app.screen(), Screen::Messages);
    assert!(app.messages().open.is_some());

    let liked = runtime.bridge().api().discover_feed("").into_iter().find(|p| p.liked_by_me);
    assert_eq!(liked.map(|p| p.id.to_string()), Some("10".to_string()));
}

#[tokio::test]
async fn test_runtime_renders_each_change() {
    let keys = [KeyInput::Char('3'), KeyInput::Char('1')];
    let mut runtime = Runtime::new(ScriptedDriver::new(keys), api(), AppConfig::default());
    runtime.run().await.expect("infallible driver");

    let screens: Vec<_> = runtime.driver().frames.iter().map(|(s, _)| *s).collect();
    assert_eq!(screens.first(), Some(&Screen::Timeline));
    assert!(screens.contains(&Screen::Notifications));
    assert_eq!(screens.last(), Some(&Screen::Timeline));
    assert!(runtime.driver().stopped);
}
