//! Creates a prompt based on the session's current status

/// Everything the line editor needs to render one read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSpec {
    pub text: String,
    pub style: PromptStyle,
    /// Whether the editor should accept embedded newlines until the chunk
    /// balances
    pub multiline: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    /// Previous turn went through cleanly
    Ready,
    /// Previous turn ended in a compile failure or a nonzero exit
    Failed,
    /// In the middle of a multi-line entry
    Continuation,
}

pub struct Prompt;

impl Prompt {
    /// Create the prompt for the next read from the actual session conditions
    pub fn get(count: usize, erred: bool, continuing: bool, multiline: bool) -> PromptSpec {
        let base = format!("[{count}]: ");

        if continuing {
            PromptSpec {
                text: format!("{:<width$}", "...", width = base.len()),
                style: PromptStyle::Continuation,
                multiline,
            }
        } else {
            PromptSpec {
                text: base,
                style: if erred {
                    PromptStyle::Failed
                } else {
                    PromptStyle::Ready
                },
                multiline,
            }
        }
    }
}
