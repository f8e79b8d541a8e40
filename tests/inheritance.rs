#[macro_use]
mod common;

#[cfg(test)]
mod inheritance {
    tests! {
        inherit_method in inheritance is OK
        "base behaviour"
    }

    tests! {
        override_method in inheritance is OK
        "derived"
    }

    tests! {
        inherit_init in inheritance is OK
        "4"
    }
}
