#[macro_use]
mod common;

#[cfg(test)]
mod class {
    tests! {
        print_class in class is OK
        "Dough"
    }

    tests! {
        print_instance in class is OK
        "Dough instance"
    }

    tests! {
        classes_are_values in class is OK
        "true"
    }

    tests! {
        inherit_self in class is ERR
        "[line 1] Error at 'A': A class can't inherit from itself."
    }

    tests! {
        superclass_not_class in class is ERR
        "Superclass must be a class."
        "[line 2]"
    }
}
