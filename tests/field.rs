#[macro_use]
mod common;

#[cfg(test)]
mod field {
    tests! {
        set_and_get in field is OK
        "3"
    }

    tests! {
        per_instance in field is OK
        "1"
        "2"
    }

    tests! {
        shadows_method in field is OK
        "field"
    }

    tests! {
        undefined_property in field is ERR
        "Undefined property 'missing'."
        "[line 3]"
    }

    tests! {
        get_on_number in field is ERR
        "Only instances have properties."
        "[line 2]"
    }

    tests! {
        set_on_number in field is ERR
        "Only instances have fields."
        "[line 2]"
    }
}
