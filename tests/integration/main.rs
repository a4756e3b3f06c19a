mod test_utils;

mod bit_flip;
mod recovery_id;
