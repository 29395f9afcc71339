//! Bash completion script generation.
//!
//! [`build_completion_script`] is a pure function; the caller decides
//! whether and where to write the result (see
//! [`crate::register::RegistrationService`]).

use std::fmt::Write;

/// A built-in subcommand and the option flags completed after it.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinCommand {
    pub name: &'static str,
    pub flags: &'static [&'static str],
}

/// The fixed set of built-in subcommands offered alongside registered
/// command names.
pub const BUILTINS: &[BuiltinCommand] = &[
    BuiltinCommand {
        name: "register",
        flags: &[],
    },
    BuiltinCommand {
        name: "docs",
        flags: &["-a", "--api", "-o", "--offline"],
    },
    BuiltinCommand {
        name: "config",
        flags: &["-e", "--export", "-i", "--import"],
    },
];

/// Build the body of a bash completion script naming every built-in
/// subcommand (with its flags) and every registered command name (with no
/// flags) as completable words.
pub fn build_completion_script<'a>(
    names: impl IntoIterator<Item = &'a str>,
    builtins: &[BuiltinCommand],
) -> String {
    let mut words: Vec<&str> = builtins.iter().map(|builtin| builtin.name).collect();
    words.extend(names);

    let mut script = String::new();
    script.push_str("_adhoc()\n{\n");
    script.push_str("    local cur prev\n");
    script.push_str("    cur=\"${COMP_WORDS[COMP_CWORD]}\"\n");
    script.push_str("    prev=\"${COMP_WORDS[COMP_CWORD-1]}\"\n\n");

    let flagged: Vec<&BuiltinCommand> = builtins
        .iter()
        .filter(|builtin| !builtin.flags.is_empty())
        .collect();
    if !flagged.is_empty() {
        script.push_str("    case \"${prev}\" in\n");
        for builtin in flagged {
            let _ = writeln!(script, "        {})", builtin.name);
            let _ = writeln!(
                script,
                "            COMPREPLY=( $(compgen -W \"{}\" -- \"${{cur}}\") )",
                builtin.flags.join(" ")
            );
            script.push_str("            return 0\n            ;;\n");
        }
        script.push_str("    esac\n\n");
    }

    let _ = writeln!(
        script,
        "    COMPREPLY=( $(compgen -W \"{}\" -- \"${{cur}}\") )",
        words.join(" ")
    );
    script.push_str("    return 0\n}\n\ncomplete -F _adhoc adhoc\n");
    script
}
