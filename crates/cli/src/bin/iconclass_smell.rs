use anyhow::Result;

fn main() -> Result<()> {
    iconclass_cli::main_entry()
}
