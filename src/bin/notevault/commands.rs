use rpassword::prompt_password;
use serde::Serialize;
use notevault::app::{NotesApp, Outcome};
use notevault::config::app_config::AppConfig;
use notevault::data::{Note, Role};
use notevault::error_exit;
use crate::cli::{AdminAction, Command, Credentials, NotesAction};

/// Runs one command; `false` means the operation was rejected.
pub async fn execute(
    app: &NotesApp,
    app_config: &AppConfig,
    command: Command,
) -> bool {
    match command {
        Command::Register(Credentials { username, password }) => {
            let password = password_or_prompt(password, "Password: ");
            report(app.register(&username, &password).await)
        },
        Command::Login(credentials) => {
            let (username, role) = log_in(app, credentials).await;
            match role {
                Some(role) => {
                    println!("Logged in as {username} ({role}).");
                    true
                },
                None => false,
            }
        },
        Command::Notes { credentials, action } => {
            let (username, role) = log_in(app, credentials).await;
            match role {
                Some(Role::User) => execute_notes(app, &username, action).await,
                Some(Role::Admin) => {
                    eprintln!("The administrator has no notes of their own.");
                    false
                },
                None => false,
            }
        },
        Command::Admin { password, action } => {
            let password = password_or_prompt(password, "Administrator password: ");
            match app.login(&app_config.admin_username, &password).await {
                (true, Some(Role::Admin)) => execute_admin(app, action).await,
                _ => {
                    eprintln!("Invalid administrator credentials.");
                    false
                },
            }
        },
    }
}

async fn execute_notes(
    app: &NotesApp,
    username: &str,
    action: NotesAction,
) -> bool {
    match action {
        NotesAction::List { json } => {
            let notes = app.list_notes(username).await;
            if json {
                print_json(&notes);
            } else {
                print_notes(&notes, "");
            }
            true
        },
        NotesAction::Add { title, content } =>
            report(app.add_note(username, &title, &content).await),
        NotesAction::Edit { index, title, content } =>
            report(app.edit_note(username, index, &title, &content).await),
        NotesAction::Delete { index } =>
            report(app.delete_note(username, index).await),
    }
}

async fn execute_admin(app: &NotesApp, action: AdminAction) -> bool {
    match action {
        AdminAction::Accounts { json } => {
            let accounts = app.list_all_accounts().await;
            if json {
                print_json(&accounts);
            } else {
                for account in accounts {
                    println!(
                        "{}\t{}\t{}\t{}",
                        account.username,
                        account.role,
                        account.password_hash,
                        account.plain_password,
                    );
                }
            }
            true
        },
        AdminAction::Notes { json } => {
            let notes = app.list_all_notes().await;
            if json {
                print_json(&notes);
            } else {
                for (username, notes) in notes {
                    println!("{username}:");
                    print_notes(&notes, "  ");
                }
            }
            true
        },
        AdminAction::ResetPassword { username, new_password } => {
            let new_password = password_or_prompt(new_password, "New password: ");
            report(app.reset_user_password(&username, &new_password).await)
        },
    }
}

async fn log_in(app: &NotesApp, credentials: Credentials) -> (String, Option<Role>) {
    let Credentials { username, password } = credentials;
    let password = password_or_prompt(password, "Password: ");
    let (ok, role) = app.login(&username, &password).await;
    if !ok {
        eprintln!("Invalid username or password.");
    }
    (username, role)
}

fn password_or_prompt(password: Option<String>, prompt: &str) -> String {
    password.unwrap_or_else(||
        prompt_password(prompt)
            .unwrap_or_else(|e| error_exit!("could not read password: {e}"))
    )
}

fn report(outcome: Outcome) -> bool {
    if outcome.ok {
        println!("{}", outcome.message);
    } else {
        eprintln!("{}", outcome.message);
    }
    outcome.ok
}

fn print_notes(notes: &[Note], indent: &str) {
    for (index, note) in notes.iter().enumerate() {
        println!("{indent}[{index}] {}", note.title);
        for line in note.content.lines() {
            println!("{indent}    {line}");
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    let json = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| error_exit!("could not serialize output: {e}"));
    println!("{json}");
}
