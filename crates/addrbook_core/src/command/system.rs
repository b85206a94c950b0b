//! Commands with no collection dependency.
//!
//! These ignore the target they are built against; their work happens
//! through effects the caller applies.

use crate::command::{
    exact_args, Command, CommandError, CommandResult, Description, Effect, Message, Report, Target,
};
use crate::settings::Language;

/// `hello`
pub struct Hello;

impl Hello {
    pub const NAME: &'static str = "hello";
    pub const USAGE: &'static str = "hello";
    pub const DESCRIPTION: Description = Description {
        en: "Displays a greeting message.",
        uk: "Виводить привітальне повідомлення.",
    };

    pub fn build<'a>(_target: Target<'a>) -> Result<Box<dyn Command + 'a>, CommandError> {
        Ok(Box::new(Hello))
    }
}

impl Command for Hello {
    fn execute(&mut self, args: &[String]) -> CommandResult {
        exact_args(args, 0, Self::NAME, Self::USAGE)?;
        Ok(Report::info(Message::Greeting))
    }
}

/// `help`: the dispatcher expands `ShowHelp` from its registry.
pub struct Help;

impl Help {
    pub const NAME: &'static str = "help";
    pub const USAGE: &'static str = "help";
    pub const DESCRIPTION: Description = Description {
        en: "Displays this help message.",
        uk: "Виводить це повідомлення про допомогу.",
    };

    pub fn build<'a>(_target: Target<'a>) -> Result<Box<dyn Command + 'a>, CommandError> {
        Ok(Box::new(Help))
    }
}

impl Command for Help {
    fn execute(&mut self, args: &[String]) -> CommandResult {
        exact_args(args, 0, Self::NAME, Self::USAGE)?;
        Ok(Report::new().with_effect(Effect::ShowHelp))
    }
}

/// `set-language <en|uk>`
pub struct SetLanguage;

impl SetLanguage {
    pub const NAME: &'static str = "set-language";
    pub const USAGE: &'static str = "set-language <en|uk>";
    pub const DESCRIPTION: Description = Description {
        en: "Sets the application language.",
        uk: "Встановлює мову застосунку.",
    };

    pub fn build<'a>(_target: Target<'a>) -> Result<Box<dyn Command + 'a>, CommandError> {
        Ok(Box::new(SetLanguage))
    }
}

impl Command for SetLanguage {
    fn execute(&mut self, args: &[String]) -> CommandResult {
        let args = exact_args(args, 1, Self::NAME, Self::USAGE)?;
        let language =
            Language::from_code(&args[0]).ok_or_else(|| CommandError::InvalidArgument {
                command: Self::NAME,
                value: args[0].clone(),
            })?;
        Ok(Report::info(Message::LanguageSet(language)).with_effect(Effect::SetLanguage(language)))
    }
}

/// `exit` / `close` / `quit`: farewell, then stop the command loop.
pub struct Exit;

impl Exit {
    pub const NAME: &'static str = "exit";
    pub const USAGE: &'static str = "exit";
    pub const DESCRIPTION: Description = Description {
        en: "Saves the address book and exits the program.",
        uk: "Зберігає адресну книгу та виходить з програми.",
    };

    pub fn build<'a>(_target: Target<'a>) -> Result<Box<dyn Command + 'a>, CommandError> {
        Ok(Box::new(Exit))
    }
}

impl Command for Exit {
    fn execute(&mut self, args: &[String]) -> CommandResult {
        exact_args(args, 0, Self::NAME, Self::USAGE)?;
        Ok(Report::info(Message::Farewell).with_effect(Effect::Exit))
    }
}
