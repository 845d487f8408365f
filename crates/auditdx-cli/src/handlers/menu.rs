use crate::handlers;
use crate::types::OutputFormat;
use crate::views::Console;
use anyhow::Result;
use auditdx_runtime::RunContext;
use std::path::PathBuf;

/// Interactive menu: one prompt, one dispatch per iteration. The only
/// state carried between iterations is the current project root.
pub fn handle(mut ctx: RunContext) -> Result<()> {
    let console = Console::stdout();
    print_banner(&console, &ctx);

    loop {
        print_menu(&console);
        console.prompt("Enter your choice (1-4): ");

        let Some(choice) = read_line()? else {
            // EOF: treat like exit
            console.plain("");
            break;
        };

        match choice.as_str() {
            "1" => {
                handlers::run::handle(&ctx, OutputFormat::Plain)?;
                pause(&console)?;
            }
            "2" => {
                handlers::quick::handle(&ctx, OutputFormat::Plain)?;
                pause(&console)?;
            }
            "3" => change_project_root(&console, &mut ctx)?,
            "4" => {
                console.plain("Goodbye!");
                break;
            }
            _ => console.error("Invalid choice! Please enter 1-4."),
        }
    }

    Ok(())
}

fn print_banner(console: &Console, ctx: &RunContext) {
    console.title("AUDIT SYSTEM TROUBLESHOOTER");
    console.plain(&format!("Project path: {}", ctx.project_root.display()));
    console.plain(&format!(
        "Started at: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
}

fn print_menu(console: &Console) {
    console.section("Choose an option:");
    console.plain("1. Run full diagnostic");
    console.plain("2. Quick API test");
    console.plain("3. Change project path");
    console.plain("4. Exit");
}

fn change_project_root(console: &Console, ctx: &mut RunContext) -> Result<()> {
    console.plain(&format!("Current path: {}", ctx.project_root.display()));
    console.prompt("Enter new project path (or press Enter to keep current): ");

    let Some(input) = read_line()? else {
        return Ok(());
    };
    if input.is_empty() {
        return Ok(());
    }

    let path = PathBuf::from(input);
    if path.exists() {
        ctx.project_root = path;
        console.success(&format!(
            "Project path updated to: {}",
            ctx.project_root.display()
        ));
    } else {
        console.error("Path does not exist!");
    }

    Ok(())
}

fn pause(console: &Console) -> Result<()> {
    console.prompt("\nPress Enter to return to the menu...");
    read_line()?;
    Ok(())
}

/// One trimmed line from stdin; `None` on end of input
fn read_line() -> Result<Option<String>> {
    let mut line = String::new();
    let read = std::io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
