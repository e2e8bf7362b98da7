//! Read-render loop driving the runtime.
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use game_content::ContentFactory;
use runtime::{OracleManager, Runtime, RuntimeConfig};

use crate::config::CliConfig;
use crate::input::{LineAction, translate};
use crate::render::render;

/// Terminal front end around a [`Runtime`].
pub struct CliApp {
    runtime: Runtime,
}

impl CliApp {
    /// Loads content and assembles the runtime described by `config`.
    pub fn build(config: &CliConfig) -> Result<Self> {
        let factory = match &config.content_dir {
            Some(dir) => ContentFactory::from_dir(dir),
            None => ContentFactory::builtin(),
        };
        let content = factory.load().context("failed to load game content")?;

        let runtime_config = RuntimeConfig {
            game_config: config.game_config(content.config.clone()),
            seed: config.seed,
            save_path: Some(config.resolved_save_path()),
        };

        let runtime = Runtime::builder()
            .config(runtime_config)
            .oracles(OracleManager::from_content(&content))
            .build()
            .context("failed to build runtime")?;

        Ok(Self::new(runtime))
    }

    pub fn new(runtime: Runtime) -> Self {
        Self { runtime }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// Renders a frame, reads a line, dispatches; until quit or end of input.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        self.draw(&mut output)?;

        for line in input.lines() {
            let line = line.context("failed to read input")?;
            match translate(&line) {
                LineAction::Quit => break,
                LineAction::None => {
                    writeln!(output, "w/s: move  enter: confirm  q: quit")?;
                    continue;
                }
                LineAction::Submit(command) => {
                    self.runtime.dispatch(command);
                }
            }
            self.draw(&mut output)?;
        }

        tracing::info!(stage = self.runtime.session().stage(), "client exiting");
        Ok(())
    }

    fn draw(&self, output: &mut impl Write) -> Result<()> {
        writeln!(output, "\n{}", render(&self.runtime.snapshot()))?;
        output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::SceneTag;

    fn app() -> CliApp {
        let content = ContentFactory::builtin().load().unwrap();
        let runtime = Runtime::builder()
            .config(RuntimeConfig {
                seed: Some(3),
                ..RuntimeConfig::default()
            })
            .oracles(OracleManager::from_content(&content))
            .build()
            .unwrap();
        CliApp::new(runtime)
    }

    #[test]
    fn scripted_lines_reach_the_first_battle() {
        let mut app = app();
        let input = "\n".repeat(12);
        let mut output = Vec::new();

        app.run(input.as_bytes(), &mut output).unwrap();

        assert_eq!(app.runtime().snapshot().scene, SceneTag::Battle);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("> New Game"));
        assert!(text.contains("Joichiro appeared!"));
    }

    #[test]
    fn quit_stops_reading() {
        let mut app = app();
        let mut output = Vec::new();

        app.run("q\n\n\n".as_bytes(), &mut output).unwrap();

        assert_eq!(app.runtime().snapshot().scene, SceneTag::Title);
    }
}
