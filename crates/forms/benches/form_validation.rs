use criterion::{Criterion, black_box, criterion_group, criterion_main};

use campus_auth::Role;
use campus_forms::{Field, FormController, Mode};

fn teacher_signup_submit(c: &mut Criterion) {
    c.bench_function("teacher_signup_submit", |b| {
        b.iter(|| {
            let mut form = FormController::unified(Mode::Signup);
            form.select_role(Role::Teacher);
            form.field_changed(Field::Email, black_box("t@school.edu"));
            form.field_changed(Field::Password, black_box("Passw0rd!"));
            form.field_changed(Field::ConfirmPassword, black_box("Passw0rd!"));
            form.field_changed(Field::FullName, black_box("Prof. T"));
            form.field_changed(Field::Institution, black_box("Hillview High"));
            form.field_changed(Field::Subjects, black_box("Physics"));
            form.submit()
        })
    });
}

fn rejected_login_submit(c: &mut Criterion) {
    c.bench_function("rejected_login_submit", |b| {
        b.iter(|| {
            let mut form = FormController::unified(Mode::Login);
            form.field_changed(Field::Email, black_box("not an email"));
            form.field_changed(Field::Password, black_box("abc123"));
            form.submit()
        })
    });
}

criterion_group!(benches, teacher_signup_submit, rejected_login_submit);
criterion_main!(benches);
