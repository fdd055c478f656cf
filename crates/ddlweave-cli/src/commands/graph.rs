use ddlweave_lib::graph::GraphPrinter;

use super::report::dialect;

pub struct GraphArgs {
    pub only_reachable: bool,
    pub show_hooks: bool,
    pub color: bool,
}

pub fn run(args: GraphArgs) {
    let parser = dialect(args.color);
    let dump = GraphPrinter::new(parser.graph())
        .only_reachable(args.only_reachable)
        .show_hooks(args.show_hooks)
        .dump();
    print!("{dump}");
}
