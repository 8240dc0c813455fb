//! Console prompting and narration for interactive games

use std::{
    cell::RefCell,
    fmt::Display,
    io::{self, BufRead, Write},
    ops::RangeInclusive,
};

use crate::{
    Error, Result,
    game::{Move, Player, max_take},
    ports::{Learner, Observer},
};

/// Line-oriented console over any reader and writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|source| Error::Io {
                operation: "read from console".to_string(),
                source,
            })?;
        if read == 0 {
            return Err(Error::Io {
                operation: "read from console".to_string(),
                source: io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"),
            });
        }
        Ok(line.trim().to_string())
    }

    /// Ask until the answer is a number inside `range`, printing `complaint` after each bad answer.
    pub fn prompt_number(
        &mut self,
        prompt: &str,
        range: RangeInclusive<usize>,
        complaint: &str,
    ) -> Result<usize> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.parse::<usize>() {
                Ok(value) if range.contains(&value) => return Ok(value),
                _ => self.say(complaint)?,
            }
        }
    }

    /// Ask until the answer is one of `choices`
    pub fn prompt_choice<'c>(
        &mut self,
        prompt: &str,
        choices: &[&'c str],
        complaint: &str,
    ) -> Result<&'c str> {
        loop {
            let answer = self.ask(prompt)?;
            if let Some(choice) = choices.iter().find(|&&choice| choice == answer) {
                return Ok(*choice);
            }
            self.say(complaint)?;
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// A person at the console taking turns
pub struct HumanPlayer<'a, R, W> {
    console: &'a RefCell<Console<R, W>>,
    name: String,
}

impl<'a, R, W> HumanPlayer<'a, R, W> {
    pub fn new(console: &'a RefCell<Console<R, W>>, name: impl Into<String>) -> Self {
        Self {
            console,
            name: name.into(),
        }
    }
}

impl<R: BufRead, W: Write> Learner for HumanPlayer<'_, R, W> {
    fn select_move(&mut self, sticks: usize) -> Result<usize> {
        let max = max_take(sticks);
        self.console.borrow_mut().prompt_number(
            &format!("{}: How many sticks do you take (1-{max})? ", self.name),
            1..=max,
            &format!("Please enter a number between 1 and {max}"),
        )
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Prints the board before every turn and announces the AI's picks
pub struct ConsoleObserver<'a, R, W> {
    console: &'a RefCell<Console<R, W>>,
    ai_side: Option<Player>,
}

impl<'a, R, W> ConsoleObserver<'a, R, W> {
    pub fn new(console: &'a RefCell<Console<R, W>>, ai_side: Option<Player>) -> Self {
        Self { console, ai_side }
    }
}

impl<R: BufRead, W: Write> Observer for ConsoleObserver<'_, R, W> {
    fn on_turn_start(&mut self, sticks: usize, _player: Player) -> Result<()> {
        let mut console = self.console.borrow_mut();
        console.say("")?;
        if sticks == 1 {
            console.say("There is 1 stick on the board.")
        } else {
            console.say(format!("There are {sticks} sticks on the board."))
        }
    }

    fn on_move(&mut self, mv: &Move) -> Result<()> {
        if self.ai_side == Some(mv.player) {
            self.console
                .borrow_mut()
                .say(format!("AI selects {}", mv.take))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn prompt_number_reprompts_until_valid() {
        let mut console = console("abc\n0\n4\n2\n");
        let value = console
            .prompt_number("Take? ", 1..=3, "Please enter a number between 1 and 3")
            .unwrap();
        assert_eq!(value, 2);
        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output.matches("Please enter a number between 1 and 3").count(), 3);
        assert_eq!(output.matches("Take? ").count(), 4);
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut console = console("");
        let err = console.prompt_choice("Again? ", &["1", "0"], "no").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn human_player_is_limited_by_remaining_sticks() {
        let console = RefCell::new(console("3\n2\n"));
        let mut human = HumanPlayer::new(&console, "Player 1");
        assert_eq!(human.select_move(2).unwrap(), 2);
        let output = String::from_utf8(console.into_inner().into_output()).unwrap();
        assert!(output.contains("Player 1: How many sticks do you take (1-2)? "));
        assert!(output.contains("Please enter a number between 1 and 2"));
    }
}
