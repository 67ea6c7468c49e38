pub mod thread_count;
