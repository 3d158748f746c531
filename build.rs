fn main() {
    // ESP-IDF environment only exists for firmware builds; host tests skip it.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
