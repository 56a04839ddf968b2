fn main() {
    multiversx_sc_meta_lib::cli_main::<claims_ledger::AbiProvider>();
}
