use crate::errors::AppResult;
use crate::ui::keys::BINDINGS;

pub fn handle() -> AppResult<()> {
    println!("Key bindings of the interactive view:\n");
    for (key, what) in BINDINGS {
        println!("  {:<22} {}", key, what);
    }
    Ok(())
}
