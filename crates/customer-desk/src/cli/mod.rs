/*
[INPUT]:  CLI subcommands
[OUTPUT]: Interactive helpers outside the TUI
[POS]:    CLI module root
[UPDATE]: When adding subcommands
*/

pub mod init;
