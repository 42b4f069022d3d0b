//! Terminal front end for the user management screen.
//!
//! # Design
//! One `UserEditor` drives the whole session. Commands mutate the draft or
//! trigger editor operations, and the list is re-rendered after anything
//! that can change it. The editor stays IO-free: this binary supplies the
//! ureq transport and a stdin confirmer, the same capabilities the tests
//! inject. The server address comes from `USERS_SERVER` and defaults to
//! the json-server convention of port 3000.

use std::io::{self, Write};

use tracing::debug;
use users_core::{
    ApiError, HttpMethod, HttpRequest, HttpResponse, User, UserClient, UserDraft, UserEditor,
};

const DEFAULT_SERVER: &str = "http://localhost:3000";

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    List,
    Get(u64),
    Add { name: String, email: String },
    Edit(u64),
    Name(String),
    Email(String),
    Save,
    Cancel,
    Delete(u64),
    Show,
    Reload,
    Help,
    Quit,
}

/// Parse one non-empty input line into a `Command`.
///
/// Multi-word names are supported: `add` treats the last token as the email
/// and joins the rest, and `name` joins everything after the keyword.
fn parse_command(line: &str) -> Result<Command, String> {
    let mut tokens = line.split_whitespace();
    let head = tokens.next().ok_or_else(|| "empty command".to_string())?;
    let rest: Vec<&str> = tokens.collect();

    let parse_id = |args: &[&str], usage: &str| -> Result<u64, String> {
        match args {
            [raw] => raw.parse().map_err(|_| format!("'{raw}' is not a numeric id")),
            _ => Err(usage.to_string()),
        }
    };

    match head {
        "list" => Ok(Command::List),
        "get" => parse_id(&rest, "usage: get <id>").map(Command::Get),
        "add" => match rest.split_last() {
            Some((email, name_parts)) if !name_parts.is_empty() => Ok(Command::Add {
                name: name_parts.join(" "),
                email: (*email).to_string(),
            }),
            _ => Err("usage: add <name> <email>".to_string()),
        },
        "edit" => parse_id(&rest, "usage: edit <id>").map(Command::Edit),
        "name" => {
            if rest.is_empty() {
                Err("usage: name <value>".to_string())
            } else {
                Ok(Command::Name(rest.join(" ")))
            }
        }
        "email" => match rest.as_slice() {
            [value] => Ok(Command::Email((*value).to_string())),
            _ => Err("usage: email <value>".to_string()),
        },
        "save" => Ok(Command::Save),
        "cancel" => Ok(Command::Cancel),
        "del" | "delete" => parse_id(&rest, "usage: del <id>").map(Command::Delete),
        "show" => Ok(Command::Show),
        "reload" => Ok(Command::Reload),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command '{other}'; type 'help'")),
    }
}

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the gateway
/// handle status interpretation. Connection-level failures map to
/// `ApiError::Transport`.
fn execute(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    debug!("{} {}", req.method.as_str(), req.path);

    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let result = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    };

    let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}

/// Put the deletion question to the user and read a y/N answer.
fn confirm_on_stdin(message: &str) -> bool {
    print!("{message} [y/N] ");
    let _ = io::stdout().flush();
    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn format_user(user: &User) -> String {
    match user.id {
        Some(id) => format!("#{id} {} <{}>", user.name, user.email),
        None => format!("#? {} <{}>", user.name, user.email),
    }
}

fn render_list(editor: &UserEditor) {
    if editor.items().is_empty() {
        println!("(no users)");
        return;
    }
    for user in editor.items() {
        println!("  {}", format_user(user));
    }
}

fn print_help() {
    println!("commands:");
    println!("  list                show the loaded users");
    println!("  get <id>            fetch one user from the server");
    println!("  add <name> <email>  create a user (multi-word names allowed)");
    println!("  edit <id>           start editing a listed user");
    println!("  name <value>        set the draft name");
    println!("  email <value>       set the draft email");
    println!("  save                submit the draft (update when editing)");
    println!("  cancel              leave edit mode and clear the draft");
    println!("  del <id>            delete a user (asks for confirmation)");
    println!("  show                show the current mode and draft");
    println!("  reload              refetch the list from the server");
    println!("  quit                leave");
}

/// Apply one parsed command to the editor.
///
/// Takes the transport and confirmation capabilities as parameters, in the
/// same shape the editor takes them, so tests can drive the loop body with
/// canned closures while `main` passes the real executors.
fn dispatch<C, T>(
    command: Command,
    client: &UserClient,
    editor: &mut UserEditor,
    transport: T,
    confirm: C,
) where
    C: FnOnce(&str) -> bool,
    T: FnOnce(HttpRequest) -> Result<HttpResponse, ApiError>,
{
    match command {
        Command::List => render_list(editor),
        Command::Get(id) => {
            let outcome =
                transport(client.build_get_user(id)).and_then(|res| client.parse_get_user(res));
            match outcome {
                Ok(user) => println!("{}", format_user(&user)),
                Err(err) => println!("lookup failed: {err}"),
            }
        }
        Command::Add { name, email } => {
            // `add` always creates; drop any active edit session first so
            // the draft cannot turn into an update of its target.
            editor.cancel_edit();
            *editor.draft_mut() = UserDraft { name, email };
            editor.submit(client, transport);
            render_list(editor);
        }
        Command::Edit(id) => {
            match editor.items().iter().find(|u| u.id == Some(id)).cloned() {
                Some(user) => {
                    editor.start_edit(&user);
                    println!("editing {}", format_user(&user));
                    println!("adjust with 'name'/'email', then 'save' or 'cancel'");
                }
                None => println!("no user with id {id} in the list; try 'reload'"),
            }
        }
        Command::Name(value) => editor.draft_mut().name = value,
        Command::Email(value) => editor.draft_mut().email = value,
        Command::Save => {
            if editor.draft().is_complete() {
                editor.submit(client, transport);
                render_list(editor);
            } else {
                println!("draft needs both a name and an email; see 'show'");
            }
        }
        Command::Cancel => {
            editor.cancel_edit();
            println!("back to create mode");
        }
        Command::Delete(id) => {
            match editor.items().iter().find(|u| u.id == Some(id)).cloned() {
                Some(user) => {
                    editor.remove(client, &user, confirm, transport);
                    render_list(editor);
                }
                None => println!("no user with id {id} in the list; try 'reload'"),
            }
        }
        Command::Show => {
            match editor.editing_target() {
                Some(target) => println!("editing {}", format_user(target)),
                None => println!("creating a new user"),
            }
            let draft = editor.draft();
            println!("draft: name={:?} email={:?}", draft.name, draft.email);
        }
        Command::Reload => {
            editor.load(client, transport);
            render_list(editor);
        }
        Command::Help => print_help(),
        // Quit never reaches dispatch; the loop handles it.
        Command::Quit => {}
    }
}

fn main() {
    tracing_subscriber::fmt().init();

    let base_url = std::env::var("USERS_SERVER").unwrap_or_else(|_| DEFAULT_SERVER.to_string());
    let client = UserClient::new(&base_url);
    let mut editor = UserEditor::new();

    println!("users @ {base_url} (type 'help' for commands)");
    editor.load(&client, execute);
    render_list(&editor);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("stdin error: {err}");
                break;
            }
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match parse_command(trimmed) {
            Ok(Command::Quit) => break,
            Ok(command) => dispatch(command, &client, &mut editor, execute, confirm_on_stdin),
            Err(message) => println!("{message}"),
        }
    }
}
