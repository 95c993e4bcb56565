use anyhow::Result;

fn main() -> Result<()> {
    confgraph_lib::main()
}
