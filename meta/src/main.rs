fn main() {
    multiversx_sc_meta_lib::cli_main::<commit_reveal_voting::AbiProvider>();
}
