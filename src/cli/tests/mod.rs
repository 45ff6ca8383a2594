//! Unit tests for CLI module
//!
//! Tests classification, the command registry and console dispatch.
//! Commands used here are in-memory stubs.

#![allow(clippy::unwrap_used)]

use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use crate::cli::{
    CliError, Command, CommandContext, CommandMetadata, CommandRegistry, CommandResult, Console,
    Invocation, OptionValue, Phase, formatting::Style,
};

struct StubCommand {
    name: &'static str,
    output: &'static str,
    active: Arc<AtomicBool>,
    runs: Arc<AtomicUsize>,
}

impl StubCommand {
    fn new(name: &'static str, output: &'static str) -> Self {
        Self {
            name,
            output,
            active: Arc::new(AtomicBool::new(true)),
            runs: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn boxed(name: &'static str, output: &'static str) -> Box<dyn Command> {
        Box::new(Self::new(name, output))
    }
}

impl Command for StubCommand {
    fn execute(&self, _ctx: &CommandContext<'_>) -> CommandResult {
        self.runs.fetch_add(1, Ordering::SeqCst);
        Ok(self.output.to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: self.name.to_string(),
            description: format!("{} stub", self.name),
            usage: self.name.to_string(),
        }
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

/// Echoes what the command saw, so tests can check what reached it.
struct EchoInvocation;

impl Command for EchoInvocation {
    fn execute(&self, ctx: &CommandContext<'_>) -> CommandResult {
        let options: Vec<String> = ctx
            .invocation
            .options
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        Ok(format!(
            "{} [{}] [{}]",
            ctx.invocation.command,
            options.join(","),
            ctx.invocation.arguments.join(",")
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "echo".to_string(),
            description: "echo".to_string(),
            usage: "echo".to_string(),
        }
    }
}

fn classify(tokens: &[&str]) -> Invocation {
    Invocation::classify(tokens)
}

fn flag() -> OptionValue {
    OptionValue::Flag
}

fn value(text: &str) -> OptionValue {
    OptionValue::Value(text.to_string())
}

mod classification {
    use super::*;

    #[test]
    fn mixes_short_long_and_arguments() {
        let invocation = classify(&["run", "-la", "foo", "--all=x", "bar"]);

        assert_eq!(invocation.command, "run");
        assert_eq!(invocation.options.len(), 3);
        assert_eq!(invocation.option("l"), Some(&flag()));
        assert_eq!(invocation.option("a"), Some(&flag()));
        assert_eq!(invocation.option("all"), Some(&value("x")));
        assert_eq!(invocation.arguments, vec!["foo", "bar"]);
    }

    #[test]
    fn short_cluster_never_takes_a_value() {
        let invocation = classify(&["run", "-f=bar"]);

        let keys: Vec<&str> = invocation.options.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["=", "a", "b", "f", "r"]);
        assert!(invocation.options.values().all(OptionValue::is_flag));
        assert!(invocation.arguments.is_empty());
    }

    #[test]
    fn end_of_options_marker_turns_rest_into_arguments() {
        let invocation = classify(&["cmd", "--", "-x", "y"]);

        assert_eq!(invocation.command, "cmd");
        assert!(invocation.options.is_empty());
        assert_eq!(invocation.arguments, vec!["-x", "y"]);
    }

    #[test]
    fn second_end_of_options_marker_is_an_argument() {
        let invocation = classify(&["cmd", "--", "--", "--long"]);

        assert_eq!(invocation.arguments, vec!["--", "--long"]);
        assert!(invocation.options.is_empty());
    }

    #[test]
    fn long_option_splits_on_first_equals_only() {
        let invocation = classify(&["cmd", "--query=a=b=c"]);

        assert_eq!(invocation.option("query"), Some(&value("a=b=c")));
    }

    #[test]
    fn long_option_with_empty_value_is_a_string() {
        let invocation = classify(&["cmd", "--name="]);

        assert_eq!(invocation.option("name"), Some(&value("")));
        assert_eq!(invocation.option("name").and_then(OptionValue::as_str), Some(""));
    }

    #[test]
    fn last_occurrence_of_an_option_wins() {
        let invocation = classify(&["cmd", "--mode=fast", "--mode", "-v", "--v=2"]);

        assert_eq!(invocation.option("mode"), Some(&flag()));
        assert_eq!(invocation.option("v"), Some(&value("2")));
    }

    #[test]
    fn leading_option_means_no_command() {
        let invocation = classify(&["-v", "build", "target"]);

        assert_eq!(invocation.command, "");
        assert_eq!(invocation.option("v"), Some(&flag()));
        assert_eq!(invocation.arguments, vec!["build", "target"]);
    }

    #[test]
    fn command_is_taken_before_end_of_options() {
        let invocation = classify(&["--", "cmd"]);

        assert_eq!(invocation.command, "");
        assert_eq!(invocation.arguments, vec!["cmd"]);
    }

    #[test]
    fn degenerate_tokens_are_still_classified() {
        let invocation = classify(&["cmd", "-", "--=", "---x"]);

        assert_eq!(invocation.option(""), Some(&value("")));
        assert_eq!(invocation.option("-x"), Some(&flag()));
        assert_eq!(invocation.options.len(), 2);
        assert!(invocation.arguments.is_empty());
    }

    #[test]
    fn empty_token_is_an_argument() {
        let invocation = classify(&["cmd", "", "x"]);

        assert_eq!(invocation.arguments, vec!["", "x"]);
    }

    #[test]
    fn command_alone_has_no_options_or_arguments() {
        let invocation = classify(&["status"]);

        assert_eq!(invocation.command, "status");
        assert!(invocation.options.is_empty());
        assert!(invocation.arguments.is_empty());
    }

    #[test]
    fn empty_input_is_empty_invocation() {
        assert_eq!(classify(&[]), Invocation::default());
    }

    #[test]
    fn classification_is_repeatable() {
        let tokens = ["deploy", "-fv", "--env=prod", "app", "--", "-z"];

        assert_eq!(classify(&tokens), classify(&tokens));
    }

    #[test]
    fn from_argv_discards_program_name() {
        let argv = vec!["/usr/bin/tool".to_string(), "list".to_string(), "-a".to_string()];
        let invocation = Invocation::from_argv(&argv);

        assert_eq!(invocation.command, "list");
        assert_eq!(invocation.option("a"), Some(&flag()));
    }

    #[test]
    fn from_argv_with_only_program_name() {
        let invocation = Invocation::from_argv(&["tool"]);

        assert_eq!(invocation, Invocation::default());
    }

    #[test]
    fn argument_accessor_is_positional() {
        let invocation = classify(&["cp", "a", "-r", "b"]);

        assert_eq!(invocation.argument(0), Some("a"));
        assert_eq!(invocation.argument(1), Some("b"));
        assert_eq!(invocation.argument(2), None);
    }

    #[test]
    fn serializes_flags_as_true_and_values_as_strings() {
        let invocation = classify(&["run", "-a", "--out=x.txt", "file"]);
        let json = serde_json::to_value(&invocation).unwrap();

        assert_eq!(json["command"], "run");
        assert_eq!(json["options"]["a"], true);
        assert_eq!(json["options"]["out"], "x.txt");
        assert_eq!(json["arguments"][0], "file");
    }
}

mod registry {
    use super::*;

    #[test]
    fn registry_starts_empty() {
        let registry = CommandRegistry::new();

        assert!(registry.list().is_empty());
        assert!(registry.get("index").is_none());
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = CommandRegistry::new();
        registry.register(StubCommand::boxed("build", "first"));
        registry.register(StubCommand::boxed("build", "second"));

        let invocation = Invocation::default();
        let ctx = CommandContext {
            invocation: &invocation,
            registry: &registry,
            style: Style::plain(),
        };

        let command = registry.get("build").unwrap();
        assert_eq!(command.execute(&ctx).unwrap(), "second");
        assert_eq!(registry.list().len(), 1);
    }

    #[test]
    fn register_many_applies_in_order() {
        let mut registry = CommandRegistry::new();
        registry.register_many(vec![
            StubCommand::boxed("a", "1"),
            StubCommand::boxed("b", "2"),
            StubCommand::boxed("a", "3"),
        ]);

        let names: Vec<String> = registry.list().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn list_is_sorted_by_name() {
        let mut registry = CommandRegistry::new();
        registry.register_many(vec![
            StubCommand::boxed("zeta", ""),
            StubCommand::boxed("alpha", ""),
            StubCommand::boxed("mid", ""),
        ]);

        let names: Vec<String> = registry.list().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn inactive_command_is_invisible() {
        let stub = StubCommand::new("hidden", "");
        let active = stub.active.clone();
        active.store(false, Ordering::SeqCst);

        let mut registry = CommandRegistry::new();
        registry.register(Box::new(stub));
        registry.register(StubCommand::boxed("shown", ""));

        assert!(registry.get("hidden").is_none());
        assert!(registry.contains("hidden"));
        let names: Vec<String> = registry.list().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["shown"]);
    }

    #[test]
    fn activity_is_evaluated_on_every_lookup() {
        let stub = StubCommand::new("toggle", "");
        let active = stub.active.clone();

        let mut registry = CommandRegistry::new();
        registry.register(Box::new(stub));

        assert!(registry.get("toggle").is_some());
        active.store(false, Ordering::SeqCst);
        assert!(registry.get("toggle").is_none());
        assert!(registry.list().is_empty());
        active.store(true, Ordering::SeqCst);
        assert!(registry.get("toggle").is_some());
    }
}

mod dispatch {
    use super::*;

    fn console() -> Console {
        Console::new(Style::plain())
    }

    #[test]
    fn new_console_is_idle() {
        let console = console();

        assert_eq!(console.phase(), Phase::Idle);
        assert_eq!(console.command_name(), "");
    }

    #[test]
    fn empty_command_defaults_to_index() {
        let mut console = Console::with_args(Style::plain(), &["tool"]);
        assert_eq!(console.phase(), Phase::Parsed);

        let output = console.run().unwrap();

        assert_eq!(console.command_name(), "index");
        assert_eq!(console.phase(), Phase::Dispatched);
        assert!(output.starts_with("Commands"));
    }

    #[test]
    fn built_ins_are_registered_on_first_dispatch() {
        let mut console = console();
        assert!(console.command("index").is_none());
        assert!(console.command("help").is_none());

        console.run().unwrap();

        assert!(console.command("index").is_some());
        assert!(console.command("help").is_some());
    }

    #[test]
    fn user_index_is_not_replaced() {
        let mut console = console();
        console.add_command(StubCommand::boxed("index", "custom index"));

        assert_eq!(console.exec("").unwrap(), "custom index");
        assert_eq!(console.exec("index").unwrap(), "custom index");
    }

    #[test]
    fn registry_holds_built_ins_after_dispatch() {
        let mut console = console();
        console.add_command(StubCommand::boxed("build", ""));
        assert!(!console.registry().contains("index"));

        console.exec("build").unwrap();

        let registry = console.registry();
        assert!(registry.contains("index"));
        assert!(registry.contains("help"));
        assert_eq!(registry.list().len(), 3);
    }

    #[test]
    fn ensure_defaults_is_idempotent() {
        let mut console = console();
        console.ensure_defaults();
        console.ensure_defaults();

        let names: Vec<String> = console.commands().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["help", "index"]);
    }

    #[test]
    fn unknown_command_carries_requested_name() {
        let mut console = Console::with_args(Style::plain(), &["tool", "deploy", "-f"]);

        let error = console.run().unwrap_err();

        assert!(matches!(error, CliError::CommandNotFound(ref name) if name == "deploy"));
        assert_eq!(error.missing_command(), Some("deploy"));
        assert_eq!(error.to_string(), "Command not found: deploy");
        assert_eq!(console.phase(), Phase::Unresolved);
    }

    #[test]
    fn inactive_command_cannot_be_dispatched() {
        let stub = StubCommand::new("sleepy", "zzz");
        stub.active.store(false, Ordering::SeqCst);
        let runs = stub.runs.clone();

        let mut console = console();
        console.add_command(Box::new(stub));

        let error = console.exec("sleepy").unwrap_err();
        assert_eq!(error.missing_command(), Some("sleepy"));
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn dispatch_runs_the_resolved_command_once() {
        let stub = StubCommand::new("build", "built");
        let runs = stub.runs.clone();

        let mut console = console();
        console.add_command(Box::new(stub));

        assert_eq!(console.exec("build --release").unwrap(), "built");
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn exec_classifies_every_token_of_the_line() {
        let mut console = console();
        console.add_command(Box::new(EchoInvocation));

        let output = console.exec(r#"echo -ab --name="J D" 'x y' -- -z"#).unwrap();

        assert_eq!(output, "echo [a=true,b=true,name=J D] [x y,-z]");
    }

    #[test]
    fn exec_replaces_previous_state() {
        let mut console = console();
        console.add_command(Box::new(EchoInvocation));

        console.exec("echo -v --level=3 first second").unwrap();
        let output = console.exec("echo third").unwrap();

        assert_eq!(output, "echo [] [third]");
        assert!(console.options().is_empty());
        assert_eq!(console.arguments(), ["third".to_string()]);
        assert_eq!(console.argument(0), Some("third"));
        assert_eq!(console.option("v"), None);
    }

    #[test]
    fn exec_after_failure_starts_fresh() {
        let mut console = console();
        console.add_command(Box::new(EchoInvocation));

        assert!(console.exec("missing -x arg").is_err());
        assert_eq!(console.exec("echo").unwrap(), "echo [] []");
        assert_eq!(console.phase(), Phase::Dispatched);
    }

    #[test]
    fn reset_clears_invocation() {
        let mut console = Console::with_args(Style::plain(), &["tool", "go", "-x", "a"]);
        console.reset();

        assert_eq!(console.phase(), Phase::Reset);
        assert_eq!(console.command_name(), "");
        assert!(console.options().is_empty());
        assert!(console.arguments().is_empty());
    }

    #[test]
    fn accessors_reflect_parsed_argv() {
        let console = Console::with_args(
            Style::plain(),
            &["tool", "copy", "--force", "--mode=fast", "src", "dst"],
        );

        assert_eq!(console.command_name(), "copy");
        assert_eq!(console.option("force"), Some(&flag()));
        assert_eq!(
            console.option("mode").and_then(OptionValue::as_str),
            Some("fast")
        );
        assert_eq!(console.arguments(), ["src".to_string(), "dst".to_string()]);
        assert_eq!(console.invocation().argument(1), Some("dst"));
    }
}

mod builtins {
    use super::*;

    #[test]
    fn index_lists_active_commands_in_order() {
        let mut console = Console::new(Style::plain());
        console.add_commands(vec![
            StubCommand::boxed("zip", ""),
            StubCommand::boxed("add", ""),
        ]);

        let output = console.exec("index").unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Commands");
        assert!(lines[1].trim_start().starts_with("add"));
        assert!(lines[2].trim_start().starts_with("help"));
        assert!(lines[3].trim_start().starts_with("index"));
        assert!(lines[4].trim_start().starts_with("zip"));
        assert!(output.contains("add stub"));
    }

    #[test]
    fn help_without_arguments_shows_grammar() {
        let mut console = Console::new(Style::plain());

        let output = console.exec("help").unwrap();

        assert!(output.starts_with("Usage"));
        assert!(output.contains("[command] [options] -- [arguments]"));
        assert!(output.contains("--name=value"));
    }

    #[test]
    fn help_for_a_command_shows_its_usage() {
        let mut console = Console::new(Style::plain());

        let output = console.exec("help help").unwrap();

        assert!(output.starts_with("help"));
        assert!(output.contains("help [command]"));
    }

    #[test]
    fn help_for_unknown_command_fails() {
        let mut console = Console::new(Style::plain());

        let error = console.exec("help nope").unwrap_err();

        assert_eq!(error.missing_command(), Some("nope"));
    }

    #[test]
    fn inspect_prints_invocation_as_json() {
        let mut console = Console::new(Style::plain());
        console.add_command(Box::new(crate::cli::commands::InspectCommand::new()));

        let output = console.exec("inspect -q --out=a.txt -- -r").unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["command"], "inspect");
        assert_eq!(json["options"]["q"], true);
        assert_eq!(json["options"]["out"], "a.txt");
        assert_eq!(json["arguments"][0], "-r");
    }

    #[test]
    fn colored_output_wraps_in_ansi_codes() {
        let mut console = Console::new(Style::new(true));

        let output = console.exec("").unwrap();

        assert!(output.contains("\x1b[0m"));
    }
}
