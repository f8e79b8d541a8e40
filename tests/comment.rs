#[macro_use]
mod common;

#[cfg(test)]
mod comment {
    tests! {
        line_comments in comment is OK
        "one"
        "two"
    }

    tests! {
        only_comment in comment is OK
    }

    tests! {
        at_eof in comment is OK
        "ok"
    }
}
