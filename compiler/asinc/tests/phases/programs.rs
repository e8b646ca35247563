//! Complete programs and their printed output.

use pretty_assertions::assert_eq;

use crate::common::{interpreter_with_input, run_ok};
use asinc::{run_file, run_source};

#[test]
fn factorial() {
    let source = "
        # factorial of 10
        n = 10;
        bunga = 1;
        sa bawat i sa [1:n] {
            bunga *= i;
        }
        ilimbag(\"10! =\", bunga);
    ";
    assert_eq!(run_ok(source), "10! = 3628800\n");
}

#[test]
fn fizzbuzz() {
    let source = "
        sa bawat i sa [1:15] {
            kapag (i % 15 == 0) { ilimbag(\"FizzBuzz\"); }
            ngunit kapag (i % 3 == 0) { ilimbag(\"Fizz\"); }
            ngunit kapag (i % 5 == 0) { ilimbag(\"Buzz\"); }
            kundiman { ilimbag(i); }
        }
    ";
    let expected = "1\n2\nFizz\n4\nBuzz\nFizz\n7\n8\nFizz\nBuzz\n11\nFizz\n13\n14\nFizzBuzz\n";
    assert_eq!(run_ok(source), expected);
}

#[test]
fn fibonacci_list() {
    let source = "
        fib = [0, 1];
        hanggat (haba(fib) < 10) {
            idagdag(fib, fib[-1] + fib[-2]);
        }
        ilimbag(fib);
        ilimbag(maximo(fib), minimo(fib), haba(fib));
    ";
    assert_eq!(
        run_ok(source),
        "[0, 1, 1, 2, 3, 5, 8, 13, 21, 34]\n34 0 10\n"
    );
}

#[test]
fn bubble_sort_with_palitan() {
    let source = "
        xs = [5, 2, 9, 1, 7];
        n = haba(xs);
        sa bawat i sa [0:n - 2] {
            sa bawat j sa [0:n - i - 2] {
                kapag (xs[j] > xs[j + 1]) {
                    t = xs[j];
                    palitan(xs, j, xs[j + 1]);
                    palitan(xs, j + 1, t);
                }
            }
        }
        ilimbag(xs, xs == nakaayos([9, 7, 5, 2, 1]));
    ";
    assert_eq!(run_ok(source), "[1, 2, 5, 7, 9] Totoo\n");
}

#[test]
fn search_with_early_exit() {
    let source = "
        xs = [4, 8, 15, 16, 23, 42];
        nahanap = -1;
        i = 0;
        hanggat (i < haba(xs)) {
            kapag (xs[i] == 16) {
                nahanap = i;
                lumisan;
            }
            i += 1;
        }
        ilimbag(\"nasa\", nahanap);
    ";
    assert_eq!(run_ok(source), "nasa 3\n");
}

#[test]
fn numeric_formatting() {
    let source = "
        ilimbag(1 / 3, 10 / 2, 2 ** 0.5);
        ilimbag(0.1 + 0.2, 7 // 2.0, -7 % 2.5);
        ilimbag(ibilog(asin_pi, 2), sahig(-0.5), kisame(-0.5));
    ";
    assert_eq!(
        run_ok(source),
        "0.3333333333333333 5.0 1.4142135623730951\n0.30000000000000004 3.0 0.5\n3.14 -1 0\n"
    );
}

#[test]
fn strings() {
    let source = "
        pangalan = \"Asin\";
        ilimbag(\"Kumusta, \" + pangalan + \"!\", haba(pangalan));
        ilimbag(baligtad(pangalan), titik(3) * 2, \"a\" < \"b\");
    ";
    assert_eq!(
        run_ok(source),
        "Kumusta, Asin! 4\n[\"n\", \"i\", \"s\", \"A\"] 33 Totoo\n"
    );
}

#[test]
fn interactive_input() {
    let mut interpreter = interpreter_with_input(&["5", "7"]);
    let source = "
        a = bilang(pahingi(\"a: \"));
        b = bilang(pahingi(\"b: \"));
        ilimbag(\"kabuuan:\", a + b);
    ";
    run_source(source, &mut interpreter).unwrap();
    assert_eq!(interpreter.get_print_output(), "a: b: kabuuan: 12\n");
}

#[test]
fn run_file_reads_program_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kumusta.asin");
    std::fs::write(&path, "ilimbag(\"Kumusta, mundo!\");\n").unwrap();

    let mut interpreter = interpreter_with_input(&[]);
    run_file(path.to_str().unwrap(), &mut interpreter).unwrap();
    assert_eq!(interpreter.get_print_output(), "Kumusta, mundo!\n");
}

#[test]
fn file_copy_program() {
    let dir = tempfile::tempdir().unwrap();
    let from = dir.path().join("pinagmulan.txt");
    let to = dir.path().join("kopya.txt");
    std::fs::write(&from, "isa\ndalawa\n").unwrap();

    let source = format!(
        "a = buksan(\"{}\", \"r\");
         b = buksan(\"{}\", \"w\");
         l = linya(a);
         hanggat (l != \"\") {{
             isulat(b, l);
             l = linya(a);
         }}
         isara(a);
         isara(b);",
        from.display(),
        to.display()
    );
    run_ok(&source);
    assert_eq!(std::fs::read_to_string(&to).unwrap(), "isa\ndalawa\n");
}
