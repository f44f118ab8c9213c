//! Menu dispatch tests: each selection runs exactly its own case


use libsys::{Errno, Error, Joined, Pid};
use proctest::{ExecArgs, Selection, Termination};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scripted_kernel::{run, Call, ScriptedKernel, MENU, SEED};

fn halted(selection: Selection) -> Termination {
    Termination::Halted { selection }
}

#[test]
fn menu_is_printed_first() {
    let (_, kernel) = run(ScriptedKernel::with_input("3\n"));
    assert!(kernel.transcript().starts_with(MENU));
}

#[test]
fn nonexistent_file_execs_a_random_decimal_name() {
    let expected: u32 = StdRng::seed_from_u64(SEED).gen_range(0..99);

    let (termination, kernel) = run(ScriptedKernel::with_input("1\n"));

    assert_eq!(termination, halted(Selection::NonexistentFile));
    assert_eq!(
        kernel.calls(),
        &[
            Call::exec(expected.to_string().as_bytes(), ExecArgs::Empty),
            Call::Halt,
        ]
    );
    let report = format!("exec(\"{}\") failed: ENOENT", expected);
    assert!(kernel.transcript().contains(&report), "{}", kernel.transcript());
}

#[test]
fn null_argument_passes_argc_without_argv() {
    let (termination, kernel) = run(ScriptedKernel::with_input("2\nhalt.coff\n"));

    assert_eq!(termination, halted(Selection::NullArgument));
    assert_eq!(
        kernel.calls(),
        &[
            Call::exec(b"halt.coff", ExecArgs::Null { argc: 1 }),
            Call::Halt,
        ]
    );
    assert!(kernel
        .transcript()
        .contains("Enter the name of a program that DOES exist.\n"));
}

#[test]
fn exec_error_only_apologises() {
    let (termination, kernel) = run(ScriptedKernel::with_input("3"));

    assert_eq!(termination, halted(Selection::ExecError));
    assert_eq!(kernel.calls(), &[Call::Halt]);
    assert!(kernel
        .transcript()
        .contains("I'm not actually sure how to cause an execution error. Sorry."));
}

#[test]
fn non_child_join_uses_a_random_pid_below_bound() {
    let expected: u32 = StdRng::seed_from_u64(SEED).gen_range(0..256);

    let (termination, kernel) = run(ScriptedKernel::with_input("4\n"));

    assert_eq!(termination, halted(Selection::NonChildJoin));
    assert_eq!(
        kernel.calls(),
        &[Call::Join(Pid::from_raw(u64::from(expected))), Call::Halt]
    );
    let report = format!("join({}) failed: EPERM", expected);
    assert!(kernel.transcript().contains(&report));
}

#[test]
fn exec_program_reports_child_pid() {
    let kernel = ScriptedKernel::with_input("5\necho.coff\n").exec_returns(Ok(Pid::from_raw(4)));
    let (termination, kernel) = run(kernel);

    assert_eq!(termination, halted(Selection::ExecProgram));
    assert_eq!(
        kernel.calls(),
        &[
            Call::exec(b"echo.coff", ExecArgs::Empty),
            Call::Halt,
        ]
    );
    assert!(kernel.transcript().contains("exec(\"echo.coff\") started pid 4\n"));
}

#[test]
fn join_child_reads_pid_with_c_integer_rules() {
    let kernel = ScriptedKernel::with_input("6 0x1f\n")
        .join_returns(Ok(Joined { status: 3, normal: false }));
    let (termination, kernel) = run(kernel);

    assert_eq!(termination, halted(Selection::JoinChild));
    assert_eq!(kernel.calls(), &[Call::Join(Pid::from_raw(31)), Call::Halt]);
    let transcript = kernel.transcript();
    assert!(transcript.contains("Enter the pid of a program that IS a parent.\n"));
    assert!(transcript.contains("join(31) -> status 3 (abnormal)\n"));
}

#[test]
fn join_child_reports_normal_exit() {
    let kernel = ScriptedKernel::with_input("6\n2\n")
        .join_returns(Ok(Joined { status: 0, normal: true }));
    let (_, kernel) = run(kernel);

    assert!(kernel.transcript().contains("join(2) -> status 0 (normal)\n"));
}

#[test]
fn negative_pid_reaches_the_kernel_unchanged() {
    let (_, kernel) = run(ScriptedKernel::with_input("6 -1"));

    assert_eq!(kernel.calls(), &[Call::Join(Pid::from_signed(-1)), Call::Halt]);
    assert!(kernel.transcript().contains("join(-1) failed: EPERM"));
}

#[test]
fn exit_process_exits_with_typed_status_then_halts() {
    let (termination, kernel) = run(ScriptedKernel::with_input("7\n-2\n"));

    assert_eq!(termination, halted(Selection::ExitProcess));
    assert_eq!(kernel.calls(), &[Call::Exit(-2), Call::Halt]);
    let transcript = kernel.transcript();
    assert!(transcript.contains("Enter the exit status for this process.\n"));
    assert!(transcript.contains("exit(-2) returned -2\n"));
}

#[test]
fn exit_return_value_is_reported_as_given() {
    let kernel = ScriptedKernel::with_input("7 5").exit_returns(-38);
    let (termination, kernel) = run(kernel);

    assert_eq!(termination, halted(Selection::ExitProcess));
    assert_eq!(kernel.calls(), &[Call::Exit(5), Call::Halt]);
    assert!(kernel.transcript().contains("exit(5) returned -38\n"));
}

#[test]
fn every_selection_halts_at_most_once() {
    for selection in Selection::ALL {
        let input = format!("{} prog.coff\n", selection.number());
        let (_, kernel) = run(ScriptedKernel::with_input(&input));

        let halts = kernel.calls().iter().filter(|c| **c == Call::Halt).count();
        let syscalls = kernel.calls().len() - halts;
        assert!(halts <= 1, "{:?} halted {} times", selection, halts);
        assert!(syscalls <= 1, "{:?} made {} syscalls", selection, syscalls);
    }
}

#[test]
fn out_of_range_selection_runs_nothing() {
    for input in ["0\n", "8\n", "-3\n", "99 echo.coff\n"] {
        let (termination, kernel) = run(ScriptedKernel::with_input(input));

        assert_eq!(termination, Termination::NoSelection, "input {:?}", input);
        assert!(kernel.calls().is_empty(), "input {:?}", input);
        assert_eq!(kernel.transcript(), MENU, "input {:?}", input);
    }
}

#[test]
fn unreadable_selection_runs_nothing() {
    for input in ["", "   \n", "two\n"] {
        let (termination, kernel) = run(ScriptedKernel::with_input(input));

        assert_eq!(termination, Termination::NoSelection, "input {:?}", input);
        assert!(kernel.calls().is_empty());
    }
}

#[test]
fn refused_halt_is_reported() {
    let kernel = ScriptedKernel::with_input("3").refuse_halt(Errno::EPERM);
    let (termination, kernel) = run(kernel);

    assert_eq!(
        termination,
        Termination::HaltRefused {
            selection: Selection::ExecError,
            error: Error::Os(Errno::EPERM),
        }
    );
    assert!(kernel.transcript().ends_with("halt() refused: EPERM\n"));
}
