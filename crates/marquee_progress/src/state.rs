use marquee_domain::{ERASE_LINE, LINE_BREAK, ProgressText};

/// What the last render left at the bottom of the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Tail {
    /// Cursor at column 0 with nothing to erase, including "no output yet".
    #[default]
    LineStart,
    /// Ordinary output that did not end with a line break.
    MidLine,
    /// The progress line is showing.
    Progress,
}

/// Instruction for the debounce timer after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimerCommand {
    Keep,
    Arm,
    Disarm,
}

/// The actor's private view of the terminal.
///
/// Transitions append the bytes to render to `frame`; the caller writes the
/// whole frame in one sink write so an erase is never separated from the text
/// that replaces it.
#[derive(Debug, Default)]
pub(crate) struct OutputState {
    tail: Tail,
    last_progress: ProgressText,
}

impl OutputState {
    pub fn last_write_was_progress(&self) -> bool {
        self.tail == Tail::Progress
    }

    #[cfg(test)]
    pub fn cursor_mid_line(&self) -> bool {
        self.tail == Tail::MidLine
    }

    #[cfg(test)]
    pub fn last_progress(&self) -> &ProgressText {
        &self.last_progress
    }

    pub fn update_progress(&mut self, text: ProgressText, frame: &mut Vec<u8>) -> TimerCommand {
        if text.is_empty() {
            if self.last_write_was_progress() {
                frame.extend_from_slice(ERASE_LINE);
                self.tail = Tail::LineStart;
            }
            self.last_progress = text;
            return TimerCommand::Disarm;
        }

        self.leave_tail(frame);
        frame.extend_from_slice(text.as_bytes());
        self.last_progress = text;
        self.tail = Tail::Progress;
        TimerCommand::Disarm
    }

    pub fn write_ordinary(&mut self, text: &[u8], frame: &mut Vec<u8>) -> TimerCommand {
        let Some(&last) = text.last() else {
            return TimerCommand::Keep;
        };

        if self.last_write_was_progress() {
            frame.extend_from_slice(ERASE_LINE);
        }
        frame.extend_from_slice(text);
        self.tail = if last == b'\n' { Tail::LineStart } else { Tail::MidLine };

        if self.last_progress.is_empty() {
            TimerCommand::Keep
        } else {
            TimerCommand::Arm
        }
    }

    pub fn restore(&mut self, frame: &mut Vec<u8>) {
        if self.last_progress.is_empty() || self.last_write_was_progress() {
            return;
        }
        self.leave_tail(frame);
        frame.extend_from_slice(self.last_progress.as_bytes());
        self.tail = Tail::Progress;
    }

    /// Makes room for a progress render: erase a showing progress line, or
    /// break off mid-line ordinary output.
    fn leave_tail(&self, frame: &mut Vec<u8>) {
        match self.tail {
            Tail::Progress => frame.extend_from_slice(ERASE_LINE),
            Tail::MidLine => frame.extend_from_slice(LINE_BREAK),
            Tail::LineStart => {}
        }
    }
}
