mod tokio_process_runner_test;
