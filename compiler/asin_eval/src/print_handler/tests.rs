use super::*;
use pretty_assertions::assert_eq;

#[test]
fn println_terminates_each_line() {
    let handler = buffer_handler();
    handler.println("kumusta");
    handler.println("");
    assert_eq!(handler.get_output(), "kumusta\n\n");
}

#[test]
fn prompt_and_line_share_a_row() {
    let handler = buffer_handler();
    handler.print("Pangalan: ");
    handler.println("Juan");
    assert_eq!(handler.get_output(), "Pangalan: Juan\n");
}

#[test]
fn shared_handle_sees_the_same_buffer() {
    let handler = buffer_handler();
    let alias = Arc::clone(&handler);
    alias.println("isa");
    handler.println("dalawa");
    assert_eq!(handler.get_output(), "isa\ndalawa\n");
}

#[test]
fn only_buffers_capture() {
    let silent = silent_handler();
    silent.println("nawala");
    assert_eq!(silent.get_output(), "");
    assert_eq!(stdout_handler().get_output(), "");
}
