//! CLI walkthrough of the registry API.
//!
//! # Responsibility
//! - Verify `user_registry_core` linkage.
//! - Exercise every registry operation with deterministic output.
//!
//! Usage: `user_registry [ABSOLUTE_LOG_DIR]`. Logging stays off without it.

use std::process::ExitCode;
use user_registry_core::{default_log_level, init_logging, User, UserManager};

const DEMO_CREATED_AT: i64 = 1_700_000_000_000;

fn main() -> ExitCode {
    if let Some(log_dir) = std::env::args().nth(1) {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging init failed: {err}");
            return ExitCode::FAILURE;
        }
    }

    println!("user_registry_core ping={}", user_registry_core::ping());
    println!("user_registry_core version={}", user_registry_core::core_version());

    let mut manager = UserManager::in_memory();
    manager.add_user(User::new(
        "user_1",
        "Alice",
        "alice@example.com",
        DEMO_CREATED_AT,
    ));
    manager.add_user(User::new(
        "user_2",
        "Bob",
        "bob@example.com",
        DEMO_CREATED_AT + 1,
    ));

    println!("count={}", manager.get_user_count());
    for user in manager.get_all_users() {
        println!("user id={} name={} email={}", user.id, user.name, user.email);
    }

    match manager.get_user_by_id("user_1") {
        Some(user) => println!("lookup user_1 -> {}", user.name),
        None => println!("lookup user_1 -> not found"),
    }

    println!("delete user_1 -> {}", manager.delete_user("user_1"));
    println!("count={}", manager.get_user_count());

    println!("delete user_999 -> {}", manager.delete_user("user_999"));
    println!("count={}", manager.get_user_count());

    log::info!(
        "event=cli_walkthrough module=cli status=ok remaining={}",
        manager.get_user_count()
    );
    ExitCode::SUCCESS
}
