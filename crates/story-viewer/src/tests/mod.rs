mod progress_timer;
